use store::Blog;

/// The in-memory blog collection, kept in fetch order.
///
/// Created blogs are appended, likes replace in place, deletes remove. Rendering
/// goes through [`sorted`](BlogList::sorted), so the stored order only acts as the
/// tie-break between equal like counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogList {
    entries: Vec<Blog>,
}

impl BlogList {
    pub fn new(blogs: Vec<Blog>) -> Self {
        Self { entries: blogs }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Blog> {
        self.entries.iter().find(|b| b.id == id)
    }

    /// Append a newly created blog. An id already present is replaced instead.
    pub fn append(&mut self, blog: Blog) {
        if !self.replace(blog.clone()) {
            self.entries.push(blog);
        }
    }

    /// Replace the entry with the same id, keeping its position.
    pub fn replace(&mut self, blog: Blog) -> bool {
        match self.entries.iter_mut().find(|b| b.id == blog.id) {
            Some(slot) => {
                *slot = blog;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Blog> {
        let index = self.entries.iter().position(|b| b.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Blogs by descending likes; equal counts keep fetch order.
    pub fn sorted(&self) -> Vec<&Blog> {
        let mut sorted: Vec<&Blog> = self.entries.iter().collect();
        // stable
        sorted.sort_by(|a, b| b.likes.cmp(&a.likes));
        sorted
    }
}

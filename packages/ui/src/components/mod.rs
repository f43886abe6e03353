mod blog_form;
pub use blog_form::BlogForm;

mod blog_item;
pub use blog_item::BlogItem;

mod login_form;
pub use login_form::LoginForm;

mod notification_banner;
pub use notification_banner::NotificationBanner;

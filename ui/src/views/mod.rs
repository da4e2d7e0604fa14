mod home;
pub use home::Home;

mod analytics;
pub use analytics::Analytics;

mod about;
pub use about::About;

mod contact;
pub use contact::Contact;

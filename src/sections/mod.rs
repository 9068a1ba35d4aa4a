// Landing page sections, one module per section in document order.

mod about;
mod contact;
mod footer;
mod hero;
mod nav;
mod services;
mod work;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use services::Services;
pub use work::Work;

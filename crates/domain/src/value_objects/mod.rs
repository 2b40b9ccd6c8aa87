pub mod credit;
pub mod email;

pub use credit::Credit;
pub use email::Email;

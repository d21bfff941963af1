pub mod channel;
pub mod client;
pub mod connection;
pub mod id;
pub mod ordering;
pub mod packet;

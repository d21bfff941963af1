/*!
   One type per relayer CLI operation. Argument orders replicate the
   relayer's CLI contract exactly, including the dst-before-src order of
   the transaction commands and the placeholder labels the CLI expects
   in identifier slots that are not assigned yet.
*/

pub mod channel;
pub mod client;
pub mod connection;
pub mod packet;

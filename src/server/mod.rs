//! Connection supervision: bind, accept, one task per connection.

pub mod listener;

pub mod error;
pub mod lb;
pub mod net;
pub mod queue;
pub mod sim;
pub mod viz;

#[cfg(test)]
mod test;

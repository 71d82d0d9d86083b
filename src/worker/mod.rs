pub mod calculator;
pub mod processor;
pub mod validator;

pub mod camel;

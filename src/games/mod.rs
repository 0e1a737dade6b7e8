pub mod scramble;

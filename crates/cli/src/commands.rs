pub mod login;
pub mod logout;
pub mod signup;
pub mod todos;
pub mod verify;
pub mod whoami;

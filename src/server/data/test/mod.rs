mod project;
mod ticket;
mod user;

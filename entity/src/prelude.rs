pub use super::project::Entity as Project;
pub use super::project_developer::Entity as ProjectDeveloper;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_developer::Entity as TicketDeveloper;
pub use super::user::Entity as User;

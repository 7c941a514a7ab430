//! Movie handlers - catalog management and tier-gated detail access.

mod create_movie;
mod delete_movie;
mod get_movie;
mod list_movies;
mod update_movie;

pub use create_movie::{CreateMovieCommand, CreateMovieHandler, CreateMovieResult};
pub use delete_movie::{DeleteMovieCommand, DeleteMovieHandler, DeleteMovieResult};
pub use get_movie::{GetMovieHandler, GetMovieQuery, GetMovieResult};
pub use list_movies::{ListMoviesHandler, ListMoviesQuery, ListMoviesResult};
pub use update_movie::{UpdateMovieCommand, UpdateMovieHandler, UpdateMovieResult};

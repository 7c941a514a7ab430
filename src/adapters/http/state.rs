//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::handlers::movie::{
    CreateMovieHandler, DeleteMovieHandler, GetMovieHandler, ListMoviesHandler, UpdateMovieHandler,
};
use crate::application::handlers::subscription::{
    CancelCheckoutHandler, CheckoutUrls, CompleteSubscriptionHandler, GetSubscriptionHandler,
    InitiateSubscriptionHandler, SyncSubscriptionStatusHandler,
};
use crate::application::handlers::user::{
    LoginUserHandler, LogoutUserHandler, RegisterUserHandler, UpdatePreferencesHandler,
};
use crate::application::handlers::wishlist::{
    ClearWishlistHandler, ListWishlistHandler, RemoveFromWishlistHandler, ToggleWishlistHandler,
};
use crate::domain::subscription::{ExpiryPolicy, PlanSchedule};
use crate::ports::{
    MovieRepository, PaymentProvider, PushGateway, SessionValidator, SubscriptionRepository,
    TokenBlacklist, TokenIssuer, UserRepository, WishlistRepository,
};

/// Shared application state containing all dependencies.
///
/// Cloned per request; every dependency is Arc-wrapped. Handlers are
/// created on demand from the shared ports.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub movies: Arc<dyn MovieRepository>,
    pub wishlists: Arc<dyn WishlistRepository>,
    pub blacklist: Arc<dyn TokenBlacklist>,
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub push_gateway: Arc<dyn PushGateway>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub plan_schedule: PlanSchedule,
    pub checkout_urls: CheckoutUrls,
    pub expiry_policy: ExpiryPolicy,
}

impl AppState {
    // User handlers

    pub fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(
            self.users.clone(),
            self.subscriptions.clone(),
            self.token_issuer.clone(),
        )
    }

    pub fn login_user_handler(&self) -> LoginUserHandler {
        LoginUserHandler::new(self.users.clone(), self.token_issuer.clone())
    }

    pub fn logout_user_handler(&self) -> LogoutUserHandler {
        LogoutUserHandler::new(self.token_issuer.clone(), self.blacklist.clone())
    }

    pub fn update_preferences_handler(&self) -> UpdatePreferencesHandler {
        UpdatePreferencesHandler::new(self.users.clone())
    }

    // Subscription handlers

    pub fn initiate_subscription_handler(&self) -> InitiateSubscriptionHandler {
        InitiateSubscriptionHandler::new(
            self.users.clone(),
            self.subscriptions.clone(),
            self.payment_provider.clone(),
            self.plan_schedule,
            self.checkout_urls.clone(),
        )
    }

    pub fn complete_subscription_handler(&self) -> CompleteSubscriptionHandler {
        CompleteSubscriptionHandler::new(
            self.subscriptions.clone(),
            self.payment_provider.clone(),
            self.expiry_policy,
        )
    }

    pub fn cancel_checkout_handler(&self) -> CancelCheckoutHandler {
        CancelCheckoutHandler::new(self.subscriptions.clone())
    }

    pub fn get_subscription_handler(&self) -> GetSubscriptionHandler {
        GetSubscriptionHandler::new(self.subscriptions.clone())
    }

    pub fn sync_subscription_status_handler(&self) -> SyncSubscriptionStatusHandler {
        SyncSubscriptionStatusHandler::new(
            self.subscriptions.clone(),
            self.payment_provider.clone(),
            self.expiry_policy,
        )
    }

    // Movie handlers

    pub fn create_movie_handler(&self) -> CreateMovieHandler {
        CreateMovieHandler::new(
            self.movies.clone(),
            self.users.clone(),
            self.push_gateway.clone(),
        )
    }

    pub fn update_movie_handler(&self) -> UpdateMovieHandler {
        UpdateMovieHandler::new(self.movies.clone())
    }

    pub fn delete_movie_handler(&self) -> DeleteMovieHandler {
        DeleteMovieHandler::new(self.movies.clone())
    }

    pub fn get_movie_handler(&self) -> GetMovieHandler {
        GetMovieHandler::new(self.movies.clone(), self.subscriptions.clone())
    }

    pub fn list_movies_handler(&self) -> ListMoviesHandler {
        ListMoviesHandler::new(self.movies.clone())
    }

    // Wishlist handlers

    pub fn toggle_wishlist_handler(&self) -> ToggleWishlistHandler {
        ToggleWishlistHandler::new(self.wishlists.clone(), self.movies.clone())
    }

    pub fn remove_from_wishlist_handler(&self) -> RemoveFromWishlistHandler {
        RemoveFromWishlistHandler::new(self.wishlists.clone())
    }

    pub fn clear_wishlist_handler(&self) -> ClearWishlistHandler {
        ClearWishlistHandler::new(self.wishlists.clone())
    }

    pub fn list_wishlist_handler(&self) -> ListWishlistHandler {
        ListWishlistHandler::new(self.wishlists.clone())
    }
}

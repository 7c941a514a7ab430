//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application core and the outside world. Adapters implement them.

mod movie_repository;
mod payment_provider;
mod push_gateway;
mod session_validator;
mod subscription_repository;
mod token_blacklist;
mod user_repository;
mod wishlist_repository;

pub use movie_repository::{MoviePage, MovieQuery, MovieRepository, PAGE_SIZE};
pub use payment_provider::{
    CheckoutSession, CheckoutState, CreateCheckoutRequest, CreateCustomerRequest,
    CreatePaymentIntentRequest, Customer, PaymentError, PaymentErrorCode, PaymentIntent,
    PaymentProvider, PaymentStatus,
};
pub use push_gateway::{DeliveryOutcome, PushDelivery, PushError, PushGateway, PushMessage};
pub use session_validator::{IssuedToken, SessionValidator, TokenIssuer};
pub use subscription_repository::SubscriptionRepository;
pub use token_blacklist::TokenBlacklist;
pub use user_repository::UserRepository;
pub use wishlist_repository::WishlistRepository;

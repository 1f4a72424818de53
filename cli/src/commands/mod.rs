pub mod health;
pub mod onboarding;
pub mod shopping;

//! Subscription plans and entitlement gating, 3-tier system.
//!
//! ## Tiers
//! - **Free**: single outlet, capped products, employees and monthly transactions
//! - **Standard**: higher caps, report export, WhatsApp receipts, cloud backup
//! - **Pro**: unlimited caps, multi-outlet, AI product scan, priority support
//!
//! ## Components
//! - **plan_type**: `PlanType`, tier rank, stored-id resolution with fallback
//! - **features**: 12 feature flags and their boolean / limit values
//! - **catalog**: static `PlanDefinition` registry and billing cycle pricing
//! - **entitlement**: plan change classification, self-serve rules, feature checks
//! - **subscription**: a user's subscription record evaluated at a given instant

pub mod catalog;
pub mod entitlement;
pub mod features;
pub mod plan_type;
pub mod subscription;

pub use catalog::{yearly_savings, BillingCycle, PlanCatalog, PlanDefinition};
pub use entitlement::{CheckoutRoute, EntitlementGate, PlanChange};
pub use features::{FeatureFlag, FlagValue, UsageLimit};
pub use plan_type::{PlanResolution, PlanType};
pub use subscription::{Subscription, SubscriptionDocument, SubscriptionStatus};

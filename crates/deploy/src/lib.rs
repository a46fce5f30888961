//! # minter-deploy
//!
//! Constructor arguments, build artifacts and ZKsync deployment of the minter trigger.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod artifact;
pub mod trigger;
pub mod zksync;

pub use artifact::{ArtifactError, ZkArtifact};
pub use trigger::{
    BATCH_CALL_CONSTRUCTOR, ConstructorLayout, SINGLE_CALL_CONSTRUCTOR, TriggerArgs, TriggerCall,
    TriggerError, parse_constructor,
};
pub use zksync::{
    ContractDeploymentError, ZkDeployer, ZkDeploymentFactory, get_signing_provider_zksync,
};

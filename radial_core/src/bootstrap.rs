// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Asynchronous load, initialization, and mount of the UI module.
//!
//! [`bootstrap`] runs once per page:
//!
//! 1. Await [`ModuleLoader::load`] (the only suspension point).
//! 2. Call [`UiModule::init`] to create the application handle.
//! 3. Look up the container by [`BootConfig::container_id`].
//! 4. Call [`UiModule::mount`] for the initial render.
//!
//! A failure at step 1 or 3 is traced once and returned; the page is left
//! untouched and nothing is retried.

use core::fmt;

use crate::config::BootConfig;
use crate::dispatch::Mounted;
use crate::module::{ContainerLookup, UiModule};
use crate::trace::{BootFailedEvent, BootStage, MountedEvent, Tracer};

/// Resolves the UI module.
///
/// On the web this is where the page waits for the document to be ready;
/// in tests it is usually an immediately ready future.
pub trait ModuleLoader {
    /// The module produced on success.
    type Module: UiModule;
    /// The failure reported on error.
    type Error: fmt::Display;

    /// Starts resolving the module.
    fn load(self) -> impl Future<Output = Result<Self::Module, Self::Error>>;
}

/// A loader for a module that is already available.
///
/// Native hosts and tests use this; it never fails and never suspends.
#[derive(Clone, Debug, Default)]
pub struct Immediate<M>(pub M);

impl<M: UiModule> ModuleLoader for Immediate<M> {
    type Module = M;
    type Error = core::convert::Infallible;

    async fn load(self) -> Result<M, Self::Error> {
        Ok(self.0)
    }
}

/// Errors from [`bootstrap`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootError<E> {
    /// The module could not be resolved.
    Load(E),
    /// No element has the configured container id.
    ContainerNotFound(&'static str),
}

impl<E: fmt::Display> fmt::Display for BootError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(err) => write!(f, "failed to load UI module: {err}"),
            Self::ContainerNotFound(id) => write!(f, "no element with id `{id}`"),
        }
    }
}

impl<E: core::error::Error + 'static> core::error::Error for BootError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            Self::ContainerNotFound(_) => None,
        }
    }
}

/// Loads the module, creates its handle, and mounts it into the container.
///
/// The returned [`Mounted`] is meant to be handed to
/// [`InputDispatcher::attach`](crate::dispatch::InputDispatcher::attach).
pub async fn bootstrap<L, D>(
    loader: L,
    document: &D,
    config: &BootConfig,
    tracer: &mut Tracer<'_>,
) -> Result<Mounted<L::Module>, BootError<L::Error>>
where
    L: ModuleLoader,
    D: ContainerLookup<Container = <L::Module as UiModule>::Container>,
{
    let module = match loader.load().await {
        Ok(module) => module,
        Err(err) => {
            let err = BootError::Load(err);
            tracer.boot_failed(&BootFailedEvent {
                stage: BootStage::Load,
                error: &err,
            });
            return Err(err);
        }
    };
    tracer.module_loaded();

    let handle = module.init();

    let Some(container) = document.element_by_id(config.container_id) else {
        let err = BootError::ContainerNotFound(config.container_id);
        tracer.boot_failed(&BootFailedEvent {
            stage: BootStage::Container,
            error: &err,
        });
        return Err(err);
    };

    module.mount(&container, &handle);
    tracer.mounted(&MountedEvent {
        container_id: config.container_id,
    });

    Ok(Mounted::new(module, handle, container))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

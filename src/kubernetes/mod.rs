// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read-only Kubernetes queries consumed by the planner.

pub mod namespaces;

pub use namespaces::namespace_exists;

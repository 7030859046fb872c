// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod factory;

use std::{
	any::{Any, type_name},
	collections::HashMap,
	sync::Arc,
};

pub use factory::ServiceFactory;
use parking_lot::RwLock;
use sqlwatch_type::{
	Result,
	diagnostic::ioc::{service_not_registered, service_type_mismatch},
	err, error,
};
use tracing::trace;

struct BoxedValue {
	value: Box<dyn Any + Send + Sync>,
	type_name: &'static str,
}

impl BoxedValue {
	fn new<T: Clone + Any + Send + Sync + 'static>(value: T) -> Self {
		Self {
			value: Box::new(value),
			type_name: type_name::<T>(),
		}
	}

	fn value<T: Clone + Any + Send + Sync + 'static>(&self) -> Option<T> {
		self.value.downcast_ref::<T>().cloned()
	}
}

/// Lightweight IoC container resolving services by id
pub struct IocContainer {
	dependencies: Arc<RwLock<HashMap<String, BoxedValue>>>,
}

impl IocContainer {
	pub fn new() -> Self {
		Self {
			dependencies: Arc::new(RwLock::new(HashMap::new())),
		}
	}

	pub fn register<T: Clone + Any + Send + Sync + 'static>(self, id: impl Into<String>, service: T) -> Self {
		self.register_service(id, service);
		self
	}

	/// Register a service from a reference (for late registration after construction)
	pub fn register_service<T: Clone + Any + Send + Sync + 'static>(&self, id: impl Into<String>, service: T) {
		self.dependencies.write().insert(id.into(), BoxedValue::new(service));
	}

	pub fn resolve<T: Clone + Any + Send + Sync + 'static>(&self, id: &str) -> Result<T> {
		trace!(id, ty = type_name::<T>(), "resolving service");
		let dependencies = self.dependencies.read();
		let Some(boxed) = dependencies.get(id) else {
			return err!(service_not_registered(id));
		};
		boxed.value::<T>().ok_or_else(|| error!(service_type_mismatch(id, type_name::<T>(), boxed.type_name)))
	}

	pub fn contains(&self, id: &str) -> bool {
		self.dependencies.read().contains_key(id)
	}

	/// Ids of all registered services, sorted
	pub fn service_ids(&self) -> Vec<String> {
		let mut ids: Vec<String> = self.dependencies.read().keys().cloned().collect();
		ids.sort();
		ids
	}
}

impl Clone for IocContainer {
	fn clone(&self) -> Self {
		Self {
			dependencies: self.dependencies.clone(),
		}
	}
}

impl Default for IocContainer {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::IocContainer;

	#[test]
	fn test_resolve_registered_service() {
		let ioc = IocContainer::new().register("answer", 42u32);
		assert_eq!(ioc.resolve::<u32>("answer").unwrap(), 42);
	}

	#[test]
	fn test_resolve_missing_service() {
		let ioc = IocContainer::new();
		let err = ioc.resolve::<u32>("missing").unwrap_err();
		assert_eq!(err.code, "IOC_001");
		assert!(err.message.contains("`missing`"));
	}

	#[test]
	fn test_resolve_with_wrong_type() {
		let ioc = IocContainer::new().register("answer", 42u32);
		let err = ioc.resolve::<String>("answer").unwrap_err();
		assert_eq!(err.code, "IOC_002");
		assert_eq!(err.label.as_deref(), Some("registered as `u32`"));
	}

	#[test]
	fn test_clones_share_registrations() {
		let ioc = IocContainer::new();
		let other = ioc.clone();
		other.register_service("late", Arc::new(String::from("registered later")));

		assert!(ioc.contains("late"));
		assert_eq!(ioc.resolve::<Arc<String>>("late").unwrap().as_str(), "registered later");
	}

	#[test]
	fn test_register_overwrites_existing_id() {
		let ioc = IocContainer::new().register("value", 1i64).register("value", 2i64);
		assert_eq!(ioc.resolve::<i64>("value").unwrap(), 2);
		assert_eq!(ioc.service_ids(), vec!["value".to_string()]);
	}

	#[test]
	fn test_service_ids_sorted() {
		let ioc = IocContainer::new().register("b", 1u8).register("a", 2u8).register("c", 3u8);
		assert_eq!(ioc.service_ids(), vec!["a", "b", "c"]);
	}
}

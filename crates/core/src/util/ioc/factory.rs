// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::any::Any;

use sqlwatch_type::Result;

use super::IocContainer;

/// Factory building a service out of the dependencies held by an [`IocContainer`]
pub trait ServiceFactory {
	type Service: Clone + Any + Send + Sync + 'static;

	/// Id under which [`ServiceFactory::register`] stores the created service
	fn service_name(&self) -> String;

	fn create(&self, ioc: &IocContainer) -> Result<Self::Service>;

	/// Create the service and register it in the container under [`ServiceFactory::service_name`]
	fn register(&self, ioc: &IocContainer) -> Result<Self::Service> {
		let service = self.create(ioc)?;
		ioc.register_service(self.service_name(), service.clone());
		Ok(service)
	}
}

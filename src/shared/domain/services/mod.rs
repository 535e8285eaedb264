pub mod managed_resource;

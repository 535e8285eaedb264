use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::domain::model::resource_schema::ResourceSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SchemaAttributeResource {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub attribute_type: String,
    pub required: bool,
    pub computed: bool,
    pub force_new: bool,
    pub validator: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ResourceTimeoutsResource {
    pub create_secs: u64,
    pub read_secs: u64,
    pub delete_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ResourceSchemaResource {
    pub type_name: String,
    pub importable: bool,
    pub attributes: Vec<SchemaAttributeResource>,
    pub timeouts: ResourceTimeoutsResource,
}

impl From<&ResourceSchema> for ResourceSchemaResource {
    fn from(schema: &ResourceSchema) -> Self {
        let timeouts = schema.timeouts();
        Self {
            type_name: schema.type_name().to_string(),
            importable: schema.is_importable(),
            attributes: schema
                .attributes()
                .iter()
                .map(|attribute| SchemaAttributeResource {
                    name: attribute.name().to_string(),
                    description: attribute.description().to_string(),
                    attribute_type: "string".to_string(),
                    required: attribute.required(),
                    computed: attribute.computed(),
                    force_new: attribute.is_force_new(),
                    validator: attribute.validator().map(str::to_string),
                })
                .collect(),
            timeouts: ResourceTimeoutsResource {
                create_secs: timeouts.create.as_secs(),
                read_secs: timeouts.read.as_secs(),
                delete_secs: timeouts.delete.as_secs(),
            },
        }
    }
}

use std::time::Duration;

pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(5 * 60);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResourceTimeouts {
    pub create: Duration,
    pub read: Duration,
    pub delete: Duration,
}

impl Default for ResourceTimeouts {
    fn default() -> Self {
        Self {
            create: DEFAULT_OPERATION_TIMEOUT,
            read: DEFAULT_OPERATION_TIMEOUT,
            delete: DEFAULT_OPERATION_TIMEOUT,
        }
    }
}

/// Declaration of one string attribute exposed to the host.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemaAttribute {
    name: &'static str,
    description: &'static str,
    required: bool,
    computed: bool,
    force_new: bool,
    validator: Option<&'static str>,
}

impl SchemaAttribute {
    pub fn required_string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: true,
            computed: false,
            force_new: false,
            validator: None,
        }
    }

    pub fn computed_string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
            computed: true,
            force_new: false,
            validator: None,
        }
    }

    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn validated_by(mut self, validator: &'static str) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn computed(&self) -> bool {
        self.computed
    }

    pub fn is_force_new(&self) -> bool {
        self.force_new
    }

    pub fn validator(&self) -> Option<&'static str> {
        self.validator
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceSchema {
    type_name: &'static str,
    attributes: Vec<SchemaAttribute>,
    timeouts: ResourceTimeouts,
    importable: bool,
}

impl ResourceSchema {
    pub fn new(type_name: &'static str, timeouts: ResourceTimeouts) -> Self {
        Self {
            type_name,
            attributes: Vec::new(),
            timeouts,
            importable: false,
        }
    }

    pub fn with_attribute(mut self, attribute: SchemaAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn importable(mut self) -> Self {
        self.importable = true;
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn attributes(&self) -> &[SchemaAttribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&SchemaAttribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name() == name)
    }

    pub fn timeouts(&self) -> ResourceTimeouts {
        self.timeouts
    }

    pub fn is_importable(&self) -> bool {
        self.importable
    }
}

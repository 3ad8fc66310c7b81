use ugrid_check::netcdf::{AttrValue, Attribute, Dataset, Dimension, Format, NcType, Variable};

/// Builds a [`Dataset`] header one dimension and variable at a time.
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self {
            dataset: Dataset::default(),
        }
    }

    pub fn format(mut self, format: Format) -> Self {
        self.dataset.format = format;
        self
    }

    pub fn dim(mut self, name: &str, length: u64) -> Self {
        self.dataset.dimensions.push(Dimension::new(name, length));
        self
    }

    pub fn record_dim(mut self, name: &str, records: u64) -> Self {
        let mut dim = Dimension::new(name, records);
        dim.unlimited = true;
        self.dataset.dimensions.push(dim);
        self.dataset.num_records = Some(records);
        self
    }

    pub fn global(mut self, name: &str, value: &str) -> Self {
        self.dataset.attributes.push(Attribute::text(name, value));
        self
    }

    pub fn var(mut self, name: &str, nc_type: NcType, dims: &[&str]) -> Self {
        self.dataset.variables.push(Variable::new(name, nc_type, dims));
        self
    }

    /// Add a mesh topology variable with `cf_role = "mesh_topology"`.
    pub fn mesh(mut self, name: &str, topology_dimension: i32, attrs: &[(&str, &str)]) -> Self {
        let mut var = Variable::new(name, NcType::Int, &[])
            .with_attribute(Attribute::text("cf_role", "mesh_topology"))
            .with_attribute(Attribute::new(
                "topology_dimension",
                AttrValue::Int(vec![topology_dimension]),
            ));
        for (attr, value) in attrs {
            var = var.with_attribute(Attribute::text(*attr, *value));
        }
        self.dataset.variables.push(var);
        self
    }

    /// Add or replace an attribute on an existing variable.
    pub fn attr(mut self, var: &str, attribute: Attribute) -> Self {
        if let Some(v) = self.dataset.variables.iter_mut().find(|v| v.name == var) {
            v.attributes.retain(|a| a.name != attribute.name);
            v.attributes.push(attribute);
        }
        self
    }

    pub fn remove_attr(mut self, var: &str, attr: &str) -> Self {
        if let Some(v) = self.dataset.variables.iter_mut().find(|v| v.name == var) {
            v.attributes.retain(|a| a.name != attr);
        }
        self
    }

    pub fn remove_var(mut self, name: &str) -> Self {
        self.dataset.variables.retain(|v| v.name != name);
        self
    }

    pub fn build(self) -> Dataset {
        self.dataset
    }
}

pub(crate) mod identifiers;


pub(crate) use identifiers::{to_component_name, to_type_name};

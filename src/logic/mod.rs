crate::reexport!(cursor);
crate::reexport!(attribute_type);
crate::reexport!(role);

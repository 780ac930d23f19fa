//! Steps concretos: delegado, asignación de items, fan-out y ficheros.

pub mod delegate;
pub mod for_each;
pub mod json_file;
pub mod set_item;

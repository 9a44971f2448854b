mod clean;

pub use clean::{clean_path, strip_host_port};

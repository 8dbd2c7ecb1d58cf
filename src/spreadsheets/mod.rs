mod sample_xlsx;

pub use sample_xlsx::export_sample_xlsx;

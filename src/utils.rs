pub mod argmax;
pub use argmax::argmax;

pub mod count_label_frequencies;
pub use count_label_frequencies::count_label_frequencies;

pub mod dataset_io;
pub use dataset_io::{
    load_dataset, read_dataset_csv, read_dataset_from_gz_bytes, read_dataset_from_string,
    save_dataset, write_dataset_csv,
};

pub mod pad_sequence;
pub use pad_sequence::{pad_sequence, pad_sequences};

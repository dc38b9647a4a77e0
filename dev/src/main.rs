use log::{error, info};
use seq_onehot::{
    count_label_frequencies, mini_batches, prepare_dummy_boolean, prepare_dummy_string,
    save_dataset, split_dataset, Dataset, DatasetConfig, Error, Vocabulary,
    DEFAULT_BOOLEAN_DATASET_CONFIG, DEFAULT_DATASET_CONFIG,
};
use std::env;
use std::fmt::{Debug, Display};
use std::hash::Hash;

fn report<T>(name: &str, dataset: Dataset<T>, config: &DatasetConfig) -> Result<(), Error>
where
    T: Eq + Hash + Clone + Debug + Display,
{
    info!(
        "{}: label distribution {:?}",
        name,
        count_label_frequencies(&dataset)
    );

    let features: Vec<Vec<T>> = dataset
        .iter()
        .map(|sample| sample.features.clone())
        .collect();
    let vocabulary = Vocabulary::build_from_batch(&features)?;

    let split = split_dataset(dataset, config)?;
    let batches = mini_batches(&split.train, config.batch_number)?;

    println!(
        "{}: vocabulary {:?}, train/val/test {}/{}/{}, {} batches",
        name,
        vocabulary.tokens(),
        split.train.len(),
        split.val.len(),
        split.test.len(),
        batches.len()
    );

    if let Some(sample) = split.train.first() {
        let matrix = vocabulary.encode(&sample.features)?;
        println!("first training sample {:?} -> {:?}", sample.features, matrix.shape());
    }

    // Optionally persist the training set, e.g. `cargo run -p dev -- out_dir`
    if let Some(output_dir) = env::args().nth(1) {
        let path = std::path::Path::new(&output_dir).join(format!("{}_train.csv.gz", name));
        save_dataset(&split.train, &path)?;
        info!("Saved training set to {:?}", path);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    println!("{}", DEFAULT_BOOLEAN_DATASET_CONFIG);
    println!("{}", DEFAULT_DATASET_CONFIG);

    let result = prepare_dummy_boolean(&DEFAULT_BOOLEAN_DATASET_CONFIG)
        .and_then(|dataset| report("dummy_boolean", dataset, &DEFAULT_BOOLEAN_DATASET_CONFIG))
        .and_then(|_| prepare_dummy_string(&DEFAULT_DATASET_CONFIG))
        .and_then(|dataset| report("dummy_string", dataset, &DEFAULT_DATASET_CONFIG));

    if let Err(e) = result {
        error!("Dataset preparation failed: {}", e);
        std::process::exit(1);
    }
}

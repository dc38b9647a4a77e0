use seq_onehot::{build_vocabulary, decode, encode};

fn main() {
    env_logger::init();

    let sequence: Vec<char> = "GATTACA".chars().collect();

    let (token_to_index, index_to_token) = build_vocabulary(&sequence).unwrap();
    let matrix = encode(&sequence, &token_to_index).unwrap();

    println!("One-hot rows for the given sequence \"GATTACA\"");
    for row in matrix.iter_rows() {
        println!("{:?}", row);
    }

    let decoded: String = decode(&matrix, &index_to_token).unwrap().into_iter().collect();
    println!("Decoded: {}", decoded);
}

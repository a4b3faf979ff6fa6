use afl::fuzz;
use brdocs::{document, DocumentType, ValidationPolicy};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;

    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_document_type(rng: &mut StdRng) -> DocumentType {
    match rng.gen_range::<u8, _>(0..5) {
        0 => DocumentType::Cpf,
        1 => DocumentType::Cnpj,
        2 => DocumentType::Pis,
        3 => DocumentType::Rg,
        _ => DocumentType::VoterTitle,
    }
}

fn gen_policy(rng: &mut StdRng) -> ValidationPolicy {
    match rng.gen_range::<u8, _>(0..3) {
        0 => ValidationPolicy::Basic,
        1 => ValidationPolicy::Permissive,
        _ => ValidationPolicy::Strict,
    }
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let document = document(gen_document_type(&mut rng)).policy(gen_policy(&mut rng));

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Document: {:?}", document);
    }

    let formatted = document.format(input).unwrap();
    let is_valid = document.is_valid(input).unwrap();

    // formatting an already formatted document changes nothing
    assert_eq!(document.format(formatted.as_str()).unwrap(), formatted);

    // a valid input keeps its digits when formatted, so it stays valid
    if is_valid {
        assert!(document.is_valid(formatted.as_str()).unwrap());
    }

    let generated = document.generate_with_rng(&mut rng).unwrap();
    assert!(document.is_valid(generated.as_str()).unwrap());
}

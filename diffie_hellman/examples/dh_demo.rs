use diffie_hellman::{DhConfig, DhError, DhParameters, DiffieHellman, OsRandom};

fn preview(bytes: &[u8]) -> String {
    hex::encode(&bytes[..bytes.len().min(16)])
}

fn main() -> Result<(), DhError> {
    env_logger::init();
    println!("=== Diffie-Hellman Key Exchange Demo ===");

    // RFC 3526 group 14 (2048-bit MODP group)
    let params = DhParameters::rfc3526_group14();
    println!("  Prime p (first 16 bytes): {}...", preview(params.modulus()));
    println!("  Generator g: {}\n", hex::encode(params.base()));

    let dh = DiffieHellman::new(DhConfig::default());
    let mut rng = OsRandom::default();

    println!("Alice is generating her key pair...");
    let alice = dh.generate_key_pair(params.modulus(), params.base(), &mut rng)?;
    println!("  Alice's Public Key (first 16 bytes): {}...\n", preview(alice.public_key()));

    println!("Bob is generating his key pair...");
    let bob = dh.generate_key_pair(params.modulus(), params.base(), &mut rng)?;
    println!("  Bob's Public Key (first 16 bytes): {}...\n", preview(bob.public_key()));

    // Parties exchange public keys.
    let secret_alice = dh.compute_shared_secret(alice.private_key(), bob.public_key(), params.modulus());
    let secret_bob = dh.compute_shared_secret(bob.private_key(), alice.public_key(), params.modulus());

    if secret_alice == secret_bob {
        println!("SUCCESS: Shared secrets match!");
        println!("  Shared secret (first 16 bytes): {}...", preview(secret_alice.as_bytes()));
    } else {
        println!("ERROR: Shared secrets DO NOT match!");
        std::process::exit(1);
    }

    // Run the raw secret through a KDF before using it as a symmetric key.
    Ok(())
}

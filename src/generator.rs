use crate::charset::{InvalidConfiguration, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, Pool};
use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

/// Draws `length` characters uniformly and independently from `pool`,
/// using the operating system's secure randomness source.
///
/// Bytes above the rejection threshold are discarded, so every pool
/// index is equally likely regardless of the pool size.
pub fn sample(pool: &Pool, length: usize) -> Result<Zeroizing<String>, InvalidConfiguration> {
    if length < MIN_PASSWORD_LENGTH || length > MAX_PASSWORD_LENGTH {
        return Err(InvalidConfiguration::LengthOutOfRange(length));
    }
    if pool.is_empty() {
        return Err(InvalidConfiguration::NoCharsetSelected);
    }

    let alphabet = pool.as_bytes();
    let pool_size = alphabet.len();
    let rejection_threshold = 256 - (256 % pool_size);

    let mut password_bytes = Zeroizing::new(Vec::with_capacity(length));

    let mut buffer = Zeroizing::new([0u8; 256]);
    OsRng.fill_bytes(&mut buffer[..]);
    let mut pos = 0;

    while password_bytes.len() < length {
        if pos >= buffer.len() {
            OsRng.fill_bytes(&mut buffer[..]);
            pos = 0;
        }

        let random_byte = buffer[pos];
        pos += 1;

        if (random_byte as usize) < rejection_threshold {
            let index = (random_byte as usize) % pool_size;
            password_bytes.push(alphabet[index]);
        }
    }

    // The pool holds ASCII only, so every byte is a valid char.
    let result: String = password_bytes.iter().map(|&b| b as char).collect();

    Ok(Zeroizing::new(result))
}

/// Generates `count` independent passwords with the same parameters.
pub fn sample_many(
    pool: &Pool,
    length: usize,
    count: usize,
) -> Result<Vec<Zeroizing<String>>, InvalidConfiguration> {
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(sample(pool, length)?);
    }
    Ok(passwords)
}

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password into an argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// A ready-to-paste `[[directory.accounts]]` block with a freshly hashed
/// password. The id is left at 0 for the operator to fill in.
pub fn directory_entry(
    email: &str,
    company_username: &str,
    password: &str,
    role: Option<&str>,
) -> Result<String, argon2::password_hash::Error> {
    let hash = hash_password(password)?;
    let mut entry = format!(
        "[[directory.accounts]]\n\
         id = 0\n\
         email = {email:?}\n\
         company_username = {company_username:?}\n\
         display_name = {company_username:?}\n\
         password_hash = {hash:?}\n"
    );
    if let Some(role) = role {
        entry.push_str(&format!("role = {:?}\n", role.trim().to_uppercase()));
    }
    Ok(entry)
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

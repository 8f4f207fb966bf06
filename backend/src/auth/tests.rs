use super::*;

#[test]
fn session_tokens_are_random_and_url_safe() {
    let first = generate_session_token();
    let second = generate_session_token();

    assert_ne!(first, second);
    assert_eq!(URL_SAFE_NO_PAD.decode(&first).unwrap().len(), SESSION_TOKEN_BYTES);
    assert!(!first.contains('+') && !first.contains('/') && !first.contains('='));
}

#[test]
fn token_hash_is_stable_hex_sha256() {
    let hash = hash_session_token("token");

    assert_eq!(hash, hash_session_token("token"));
    assert_eq!(hash.len(), 64);
    assert_ne!(hash, hash_session_token("other"));
}

#[test]
fn password_round_trip() {
    let hash = hash_password("correct horse").unwrap();

    assert!(hash.starts_with("$argon2"));
    assert!(verify_password("correct horse", &hash).unwrap());
    assert!(!verify_password("wrong horse", &hash).unwrap());
}

#[test]
fn malformed_stored_hash_is_an_error() {
    assert!(verify_password("anything", "not-a-phc-string").is_err());
}

#[test]
fn session_cookie_attributes() {
    let policy = CookiePolicy {
        secure: true,
        ttl: chrono::Duration::hours(24),
    };

    let cookie = policy.session_cookie("abc".to_string());
    assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(
        cookie.max_age(),
        Some(cookie::time::Duration::hours(24))
    );
}

#[test]
fn local_cookie_is_not_secure() {
    let policy = CookiePolicy {
        secure: false,
        ttl: chrono::Duration::hours(1),
    };

    assert_eq!(policy.session_cookie("abc".to_string()).secure(), Some(false));
}

#[test]
fn empty_cookie_is_no_token() {
    let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE_NAME, ""));
    assert_eq!(session_token(&jar), None);

    let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE_NAME, "tok"));
    assert_eq!(session_token(&jar), Some("tok".to_string()));
}

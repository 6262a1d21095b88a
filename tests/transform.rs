// tests/transform.rs
use qr_kiosk::specs::profile::query_url;

#[test]
fn profile_link_becomes_query_link() {
    assert_eq!(
        query_url("https://x.edu/perfil?idperfil=42"),
        "https://x.edu/perfil?action=consulta&id=42"
    );
}

#[test]
fn every_occurrence_is_rewritten() {
    assert_eq!(
        query_url("https://x.edu/p?idperfil=1&back=idperfil=2"),
        "https://x.edu/p?action=consulta&id=1&back=action=consulta&id=2"
    );
}

#[test]
fn unrelated_links_pass_through() {
    let url = "https://example.org/page?id=9";
    assert_eq!(query_url(url), url);
    assert_eq!(query_url(""), "");
}

#[test]
fn matching_is_case_sensitive() {
    let url = "https://x.edu/perfil?IDPERFIL=42";
    assert_eq!(query_url(url), url);
}

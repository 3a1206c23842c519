use strutils::{base64_encode_to_string, hex_to_vec, split_url, utf8_to_latin1_vec};

fn main() {
    // Split a URL; the scheme is lower-cased inside the buffer
    let mut url = String::from("HTTPS://example.com:8080/path?query=value#hash");
    let parts = split_url(&mut url).expect("Failed to split URL");

    println!("Scheme: {}", parts.scheme); // https
    println!("Host: {}", parts.host); // example.com
    println!("Port: {}", parts.port); // 8080
    println!("Path: {}", parts.path); // /path?query=value

    println!("Hex: {:02X?}", hex_to_vec("A489B1")); // [A4, 89, B1]
    println!(
        "Base64: {}",
        base64_encode_to_string(b"hello").expect("non-empty input")
    ); // aGVsbG8=

    let mut text = "café 😀".as_bytes().to_vec();
    utf8_to_latin1_vec(&mut text);
    println!("Latin-1: {text:02X?}"); // [63, 61, 66, E9, 20, 5F]
}

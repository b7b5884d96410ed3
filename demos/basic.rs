use fasturl::Url;

fn main() {
    // A full URL
    let url = Url::parse("https://user@example.com:8080/path?query=value#hash")
        .expect("Failed to parse URL");

    println!("URL: {url}"); // https://user@example.com:8080/path?query=value#hash
    println!("Protocol: {}", url.protocol()); // https
    println!("Host: {}", url.host()); // example.com
    println!("Port: {}", url.port()); // 8080
    println!("Path: {}", url.path()); // /path
    println!("Query: {}", url.query()); // query=value
    println!("Fragment: {}", url.fragment()); // hash

    // No scheme: a bare host and port, as found in proxy logs
    let target = Url::parse("localhost:8080/health").expect("Failed to parse target");
    println!("Host: {}, Port: {:?}", target.host(), target.port_number()); // localhost, Some(8080)

    // Opaque schemes keep what follows the colon as the host
    let tel = Url::parse("tel:+1-816-555-1212").expect("Failed to parse tel URL");
    println!("Protocol: {}, Host: {}", tel.protocol(), tel.host()); // tel, +1-816-555-1212

    // Byte offsets instead of slices
    for (name, span) in url.components().iter() {
        println!("{name}: {:?}", span.range());
    }

    assert!(!fasturl::can_parse("not a url"));
}

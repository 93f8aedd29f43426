use greeter::{compose, greet_to, Greeter, DESCRIPTION_LINE};

fn render(name: &str) -> String {
    let mut out = Vec::new();
    greet_to(name, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_world_example() {
    assert_eq!(render("World"), "Hello, World!\nPythonのサンプルコードです。\n");
}

#[test]
fn test_first_line_contains_input() {
    for name in ["World", "Ferris", "", " ", "世界", "Zoë", "a\tb"] {
        let output = render(name);
        let first = output.split('\n').next().unwrap();
        assert!(first.contains(name), "first line {:?} misses {:?}", first, name);
        assert_eq!(first, format!("Hello, {}!", name));
    }
}

#[test]
fn test_second_line_is_constant() {
    let seconds: Vec<String> = ["World", "", "世界", "x".repeat(1024).as_str()]
        .iter()
        .map(|name| render(name).lines().nth(1).unwrap().to_string())
        .collect();

    assert!(seconds.iter().all(|line| line == DESCRIPTION_LINE));
}

#[test]
fn test_description_bytes_are_utf8() {
    let output = render("World");
    let bytes = output.as_bytes();
    let expected = DESCRIPTION_LINE.as_bytes();

    assert!(bytes.windows(expected.len()).any(|w| w == expected));
    assert!(std::str::from_utf8(bytes).is_ok());
}

#[test]
fn test_same_input_same_output() {
    assert_eq!(render("Ferris"), render("Ferris"));

    let mut greeter = Greeter::new(Vec::new());
    greeter.greet("Ferris").unwrap();
    greeter.greet("Ferris").unwrap();
    let output = String::from_utf8(greeter.into_inner()).unwrap();
    assert_eq!(output, render("Ferris").repeat(2));
}

#[test]
fn test_compose_matches_written_output() {
    assert_eq!(compose("World").to_string(), render("World"));
}

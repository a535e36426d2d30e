use super::*;
use std::sync::Once;

const TEST_COMPLEX: &str = include_str!("complex.yaml");
const TEST_SERVICE: &str = include_str!("service.yaml");

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn settings() -> Yaml {
    yaml_map! {
        "database" => yaml_map! { "host" => "localhost", "port" => 3306 },
        "api_key" => "YOUR_API_KEY",
    }
}

#[test]
fn test_complex() {
    init_tracing();
    let ans = parse(TEST_COMPLEX).unwrap_or_else(|e| panic!("{}", e.indicated(TEST_COMPLEX)));
    assert_eq!(
        ans,
        yaml_map! {
            "name" => "My Application",
            "version" => "1.0.0",
            "settings" => settings(),
            "another_settings" => settings(),
            "description" => "This is a multi-line description\nthat spans multiple lines.",
            "items" => yaml_seq![
                yaml_map! { "id" => 1, "name" => "Item 1" },
                yaml_map! { "id" => 2, "name" => "Item 2" },
            ],
            "object" => yaml_map! { "a" => 1, "b" => 2 },
            "bool" => true,
            "nothing" => (),
            "number" => 42,
        }
    );
}

#[test]
fn test_service() {
    init_tracing();
    let ans = parse(TEST_SERVICE).unwrap_or_else(|e| panic!("{}", e.indicated(TEST_SERVICE)));
    let expected = yaml_map! {
        "service" => yaml_map! {
            "name" => "api-gateway",
            "port" => 8080,
            "version" => "1.2.3",
        },
        "database" => yaml_map! {
            "enabled" => true,
            "type" => "postgres",
            "credentials" => yaml_map! { "user" => "admin", "pass" => "securepassword" },
        },
        "features" => yaml_seq!["logging", "monitoring", "caching"],
    };
    assert_eq!(ans, expected);
    let doc = dump(&ans);
    assert_eq!(parse(&doc).unwrap(), expected);
    assert_eq!(dump(&parse(&doc).unwrap()), doc);
}

#[test]
fn test_alias_is_independent() {
    init_tracing();
    let doc = "
settings: &s
  database:
    host: localhost
    port: 3306
another: *s
";
    let mut ans = parse(doc).unwrap();
    assert_eq!(ans.get("settings"), ans.get("another"));
    if let Some(db) = ans.get_mut("another").and_then(|n| n.get_mut("database")) {
        db.bind("host".into(), "remote".into());
    }
    assert_eq!(
        ans.get_path(&["settings", "database", "host"]),
        Some(&Yaml::from("localhost"))
    );
    assert_eq!(
        ans.get_path(&["another", "database", "host"]),
        Some(&Yaml::from("remote"))
    );
}

#[test]
fn test_chained_anchors() {
    let doc = "
name: My Application
settings: &settings_block  # Anchor for settings
  database:
    host: localhost
    port: 3306
  api_key: \"YOUR_API_KEY\"

another_settings: *settings_block # Alias to settings

more_settings: &more_settings
  db:
    host: remotehost

copy_of_more_settings: *more_settings
merged:
  <<: *more_settings
  extra: 1
";
    let more = yaml_map! { "db" => yaml_map! { "host" => "remotehost" } };
    assert_eq!(
        parse(doc).unwrap(),
        yaml_map! {
            "name" => "My Application",
            "settings" => settings(),
            "another_settings" => settings(),
            "more_settings" => more.clone(),
            "copy_of_more_settings" => more,
            "merged" => yaml_map! {
                "db" => yaml_map! { "host" => "remotehost" },
                "extra" => 1,
            },
        }
    );
}

#[test]
fn test_failures_are_whole() {
    init_tracing();
    let doc = "a: 1\nitems: [1, 2, \"invalid json\"]\nb: 2\n";
    let e = parse(doc).unwrap_err();
    assert_eq!(e.line(), 2);
    assert_eq!(
        e.indicated(doc),
        "malformed inline collection `[1, 2, \"invalid json\"]` at line 2\n\n2:1\nitems: [1, 2, \"invalid json\"]\n^"
    );
    assert!(matches!(
        parse("a: 1\nalias: *missing\n"),
        Err(DecodeError::UnresolvedAlias { ref name, line: 2 }) if name == "missing"
    ));
}

#[test]
fn test_scalar_map_round_trip() {
    let n = yaml_map! {
        "s" => "text",
        "n" => -12.5,
        "i" => 7,
        "t" => true,
        "f" => false,
        "z" => (),
        "q" => "100",
        "c" => "host:port",
        "v" => "1.2.3",
        "word" => "NULL",
        "sp" => " padded ",
        "e" => "",
    };
    assert_eq!(parse(&dump(&n)).unwrap(), n);
}

#[test]
fn test_idempotent_dump() {
    let n = yaml_seq![
        yaml_map! {
            "list" => yaml_seq![yaml_seq!["a", 1], yaml_map! {}],
            "nested" => yaml_map! { "deep" => yaml_map! { "k" => "v: w" } },
        },
        "tail",
        yaml_seq![],
    ];
    let once = dump(&n);
    assert_eq!(dump(&parse(&once).unwrap()), once);
    assert_eq!(parse(&once).unwrap(), n);
    for n in [
        Yaml::from("x"),
        Yaml::from("a: b"),
        Yaml::from("- x"),
        Yaml::from(3),
        Yaml::from(true),
        Yaml::Null,
        yaml_seq![],
        yaml_map! {},
        yaml_seq![yaml_seq![]],
        yaml_map! { "k" => yaml_map! {} },
    ] {
        let once = dump(&n);
        assert_eq!(dump(&parse(&once).unwrap()), once, "{:?}", n);
        assert_eq!(parse(&once).unwrap(), n);
    }
}

#[test]
fn test_independent_calls() {
    let handles = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let doc = format!("a: &x {}\nb: *x\n", i);
                parse(&doc).unwrap()
            })
        })
        .collect::<Vec<_>>();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), yaml_map! { "a" => i, "b" => i });
    }
}

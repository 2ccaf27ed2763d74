use routeurl::{parse, ParamValue, Params, RootUrl, Segment, Url};

fn flag() -> ParamValue {
    ParamValue::Flag
}

fn val(value: &str) -> ParamValue {
    ParamValue::from(value)
}

fn params(pairs: Vec<(&str, ParamValue)>) -> Params {
    pairs.into_iter().collect()
}

macro_rules! parse_tests {
    ($($name:ident {
        $( $url:literal => $expected:expr ),* $(,)?
    }),* $(,)?) => { $(
        #[test]
        fn $name() {
            $(
                let got = match parse($url) {
                    Ok(root) => root,
                    Err(err) => panic!("failed to parse '{}': {}", $url, err),
                };

                assert_eq!(got, $expected, "unexpected tree for '{}'", $url);
            )*
        }
   )* };
}

parse_tests! {
    empty_input {
        "" => RootUrl::empty(),
        "/" => RootUrl::empty(),
    },
    single_segment {
        "a" => RootUrl::new("a"),
        "/a" => RootUrl::new("a"),
        "hello-world.html" => RootUrl::new("hello-world.html"),
        "popup:compose" => RootUrl::new("popup:compose"),
    },
    child_chain {
        "a/b" => RootUrl::new("a").with_child(Url::new("b")),
        "/a/b/c" => RootUrl::new("a").with_child(Url::new("b").with_child(Url::new("c"))),
        "a/" => RootUrl::new("a"),
    },
    flag_and_valued_matrix_params {
        "x/a;x;y=1" => RootUrl::new("x").with_child(
            Url::new("a").with_params(params(vec![("x", flag()), ("y", val("1"))])),
        ),
    },
    matrix_params_last_write_wins {
        "x/a;k=1;j;k=2" => RootUrl::new("x").with_child(
            Url::new("a").with_params(params(vec![("k", val("2")), ("j", flag())])),
        ),
    },
    empty_matrix_values {
        "x/a;k=" => RootUrl::new("x").with_child(Url::new("a").with_params(params(vec![("k", val(""))]))),
        "x/a;" => RootUrl::new("x").with_child(Url::new("a").with_params(params(vec![("", flag())]))),
        "x/a;=v" => RootUrl::new("x").with_child(Url::new("a").with_params(params(vec![("", val("v"))]))),
    },
    auxiliary_routes {
        "a(b//c)" => RootUrl::new("a").with_auxiliary(vec![Url::new("b"), Url::new("c")]),
        "a()" => RootUrl::new("a"),
        "a(b/c//d)" => RootUrl::new("a").with_auxiliary(vec![
            Url::new("b").with_child(Url::new("c")),
            Url::new("d"),
        ]),
        "a(b(c))" => RootUrl::new("a").with_auxiliary(vec![
            Url::new("b").with_auxiliary(vec![Url::new("c")]),
        ]),
        "a(/b)" => RootUrl::new("a").with_auxiliary(vec![Url::new("b")]),
    },
    nested_child_with_query {
        "a/b?x=1&y=2" => RootUrl::new("a")
            .with_child(Url::new("b"))
            .with_query_params(params(vec![("x", val("1")), ("y", val("2"))])),
    },
    query_params {
        "a?debug" => RootUrl::new("a").with_query_params(params(vec![("debug", flag())])),
        "a?x=1&x=2" => RootUrl::new("a").with_query_params(params(vec![("x", val("2"))])),
        "a?expr=b=c;d" => RootUrl::new("a").with_query_params(params(vec![("expr", val("b=c;d"))])),
        "a?" => RootUrl::new("a").with_query_params(params(vec![("", flag())])),
        "?x=1" => RootUrl::new("").with_query_params(params(vec![("x", val("1"))])),
    },
    matrix_child_and_auxiliary {
        "r/a;m=1(b)/c" => RootUrl::new("r").with_child(
            Url::new("a")
                .with_params(params(vec![("m", val("1"))]))
                .with_auxiliary(vec![Url::new("b")])
                .with_child(Url::new("c")),
        ),
    },
    root_with_everything {
        "/inbox(chat:bob)/33;open/messages?read=1&sort=date" => RootUrl::new("inbox")
            .with_auxiliary(vec![Url::new("chat:bob")])
            .with_child(
                Url::new("33")
                    .with_params(params(vec![("open", flag())]))
                    .with_child(Url::new("messages")),
            )
            .with_query_params(params(vec![("read", val("1")), ("sort", val("date"))])),
    },
    root_matrix_params_are_dropped {
        "a;z=9" => RootUrl::new("a"),
        "a;x;y=1" => RootUrl::new("a"),
        "a;z=9/b" => RootUrl::new("a").with_child(Url::new("b")),
        "a(b);z=9/c" => RootUrl::new("a")
            .with_auxiliary(vec![Url::new("b")])
            .with_child(Url::new("c")),
    },
    root_matrix_params_end_the_root {
        // auxiliary routes are only looked for before root matrix params
        "a;m=1(b)/c" => RootUrl::new("a"),
    },
    double_slash_ends_the_chain {
        "a//b" => RootUrl::new("a"),
    },
    trailing_input_is_ignored {
        "a/b#section" => RootUrl::new("a").with_child(Url::new("b")),
        "a?x=1#top" => RootUrl::new("a").with_query_params(params(vec![("x", val("1"))])),
        "a)" => RootUrl::new("a"),
    },
    degenerate_segments {
        "#" => RootUrl::new(""),
        "a/;x" => RootUrl::new("a").with_child(Url::new("").with_params(params(vec![("x", flag())]))),
        "a(//b)" => RootUrl::new("a").with_auxiliary(vec![Url::new("").with_child(Url::new("b"))]),
    },
}

#[test]
fn flag_params_are_flags() {
    let root = parse("r/a;x;y=1").unwrap();
    let a = root.child().unwrap();

    assert_eq!(a.path(), "a");
    assert!(a.params().get("x").unwrap().is_flag());
    assert_eq!(a.params().get("y").and_then(ParamValue::as_str), Some("1"));
    assert!(a.child().is_none());
    assert!(a.auxiliary().is_empty());
}

#[test]
fn query_absent_vs_present() {
    assert!(parse("a/b").unwrap().query_params().is_none());
    assert!(parse("a/b?x").unwrap().query_params().is_some());
}

#[test]
fn from_str() {
    let root: RootUrl = "a/b?x=1".parse().unwrap();
    assert_eq!(root, parse("a/b?x=1").unwrap());
}

#[test]
fn parses_are_independent() {
    let first = parse("a/b(c)").unwrap();
    let second = parse("x?y").unwrap();

    assert_eq!(first.to_string(), "a/b(c)");
    assert_eq!(second.to_string(), "x?y");
}

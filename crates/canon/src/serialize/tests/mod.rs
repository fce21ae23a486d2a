use std::cell::Cell;

use super::*;
use crate::container::{ALT, BAG, RDF_NS, SEQ};
use crate::rewrite::{NoRewrite, Substitute};
use crate::vocab::EM_NAMESPACE as EM_NS;

const FIREFOX: &str = "{ec8030f7-c20a-464f-9b0e-13a3a9e97384}";

fn render(text: &str, root: &str) -> Result<String, SerializeError> {
    render_in(text, root, &Vocabulary::default())
}

fn render_in(text: &str, root: &str, vocab: &Vocabulary) -> Result<String, SerializeError> {
    let store = crate::parse(text).expect("valid statements");
    serialize(&store, &Subject::from_label(root), vocab, NoRewrite)
}

fn update_manifest() -> Vec<String> {
    vec![
        format!("<urn:mozilla:extension:foo@example.org> <{EM_NS}updates> _:id1 ."),
        format!("<urn:mozilla:extension:foo@example.org> <{EM_NS}signature> \"SIG\" ."),
        format!("_:id1 <{RDF_NS}type> <{SEQ}> ."),
        format!("_:id1 <{RDF_NS}_1> _:id2 ."),
        format!("_:id2 <{EM_NS}version> \"1.0\" ."),
        format!("_:id2 <{EM_NS}targetApplication> _:id3 ."),
        format!("_:id3 <{EM_NS}id> \"{FIREFOX}\" ."),
        format!("_:id3 <{EM_NS}minVersion> \"3.0\" ."),
        format!("_:id3 <{EM_NS}maxVersion> \"3.6.*\" ."),
        format!("_:id3 <{EM_NS}updateLink> <https://example.org/foo-1.0.xpi> ."),
    ]
}

#[test]
fn sequence_of_named_members() -> anyhow::Result<()> {
    let text = format!(
        "<urn:ext1> <urn:x#type> <{SEQ}> .\n<urn:ext1> <urn:x#li> <urn:a> .\n<urn:ext1> <urn:x#li> <urn:b> ."
    );
    let out = render_in(&text, "urn:ext1", &Vocabulary::new("urn:x#"))?;
    insta::assert_snapshot!(out, @r#"
    <RDF:Seq about="urn:ext1">
      <RDF:li>
        <RDF:Description about="urn:a">
        </RDF:Description>
      </RDF:li>
      <RDF:li>
        <RDF:Description about="urn:b">
        </RDF:Description>
      </RDF:li>
    </RDF:Seq>
    "#);
    Ok(())
}

#[test]
fn update_manifest_snapshot() -> anyhow::Result<()> {
    let out = render(
        &update_manifest().join("\n"),
        "urn:mozilla:extension:foo@example.org",
    )?;
    insta::assert_snapshot!(out, @r#"
    <RDF:Description about="urn:mozilla:extension:foo@example.org">
      <em:signature>SIG</em:signature>
      <em:updates>
        <RDF:Seq>
          <RDF:li>
            <RDF:Description>
              <em:targetApplication>
                <RDF:Description>
                  <em:id>{ec8030f7-c20a-464f-9b0e-13a3a9e97384}</em:id>
                  <em:maxVersion>3.6.*</em:maxVersion>
                  <em:minVersion>3.0</em:minVersion>
                  <em:updateLink>https://example.org/foo-1.0.xpi</em:updateLink>
                </RDF:Description>
              </em:targetApplication>
              <em:version>1.0</em:version>
            </RDF:Description>
          </RDF:li>
        </RDF:Seq>
      </em:updates>
    </RDF:Description>
    "#);
    Ok(())
}

#[test]
fn input_order_does_not_matter() -> anyhow::Result<()> {
    let root = "urn:mozilla:extension:foo@example.org";
    let lines = update_manifest();
    let expected = render(&lines.join("\n"), root)?;

    let mut reversed = lines.clone();
    reversed.reverse();
    assert_eq!(render(&reversed.join("\n"), root)?, expected);

    for n in 1..lines.len() {
        let mut rotated = lines.clone();
        rotated.rotate_left(n);
        assert_eq!(render(&rotated.join("\n"), root)?, expected, "rotated by {n}");
    }
    Ok(())
}

#[test]
fn member_order_follows_input() -> anyhow::Result<()> {
    let text = format!(
        "<urn:s> <{RDF_NS}type> <{SEQ}> .\n<urn:s> <{RDF_NS}_2> <urn:b> .\n<urn:s> <{RDF_NS}_1> <urn:a> ."
    );
    let out = render(&text, "urn:s")?;
    let b = out.find("urn:b").unwrap();
    let a = out.find("urn:a").unwrap();
    assert!(b < a, "members keep statement order, not ordinal order");
    assert_eq!(out.matches("<RDF:li>").count(), 2);
    assert!(!out.contains(SEQ), "the type marker is never a property");
    Ok(())
}

#[test]
fn repeated_runs_are_identical() -> anyhow::Result<()> {
    let store = crate::parse(&update_manifest().join("\n"))?;
    let vocab = Vocabulary::default();
    let root = Subject::Iri("urn:mozilla:extension:foo@example.org".into());
    let mut ser = Serializer::new(&store, &vocab, NoRewrite);
    assert_eq!(ser.serialize(&root)?, ser.serialize(&root)?);
    Ok(())
}

#[test]
fn blank_subjects_are_anonymous() -> anyhow::Result<()> {
    let text = format!("_:id1 <{EM_NS}name> \"anon\" .\n<urn:a> <{EM_NS}name> \"named\" .");
    assert_eq!(
        render(&text, "_:id1")?,
        "<RDF:Description>\n  <em:name>anon</em:name>\n</RDF:Description>\n"
    );
    assert_eq!(
        render(&text, "urn:a")?,
        "<RDF:Description about=\"urn:a\">\n  <em:name>named</em:name>\n</RDF:Description>\n"
    );
    Ok(())
}

#[test]
fn foreign_predicates_are_dropped() -> anyhow::Result<()> {
    let text = format!(
        "<urn:a> <http://purl.org/dc/elements/1.1/title> \"t\" .\n<urn:a> <{RDF_NS}type> <urn:Thing> .\n<urn:a> <{EM_NS}> \"bare namespace\" ."
    );
    assert_eq!(
        render(&text, "urn:a")?,
        "<RDF:Description about=\"urn:a\">\n</RDF:Description>\n"
    );
    Ok(())
}

#[test]
fn undescribed_subjects_render_empty() -> anyhow::Result<()> {
    assert_eq!(
        render("", "urn:nowhere")?,
        "<RDF:Description about=\"urn:nowhere\">\n</RDF:Description>\n"
    );

    let text = format!("<urn:a> <{EM_NS}targetApplication> _:id9 .");
    assert_eq!(
        render(&text, "urn:a")?,
        "<RDF:Description about=\"urn:a\">\n  <em:targetApplication>\n    <RDF:Description>\n    </RDF:Description>\n  </em:targetApplication>\n</RDF:Description>\n"
    );
    Ok(())
}

#[test]
fn alternatives_and_bags_fail_loudly() {
    for marker in [ALT, BAG] {
        let text = format!(
            "<urn:a> <{EM_NS}choices> _:id1 .\n_:id1 <{RDF_NS}type> <{marker}> .\n_:id1 <{RDF_NS}_1> <urn:m> ."
        );
        match render(&text, "urn:a") {
            Err(SerializeError::Unsupported(UnsupportedContainer { subject, kind })) => {
                assert_eq!(subject, Subject::Blank("_:id1".into()));
                assert_eq!(kind.marker(), Some(marker));
            },
            other => panic!("expected an unsupported container, got {other:?}"),
        }
    }
}

#[test]
fn cycles_through_blank_nodes_are_detected() {
    let text = format!("_:id1 <{EM_NS}next> _:id2 .\n_:id2 <{EM_NS}next> _:id1 .");
    assert_eq!(
        render(&text, "_:id1"),
        Err(SerializeError::Cycle(Subject::Blank("_:id1".into())))
    );
}

#[test]
fn cycles_through_members_are_detected() {
    let text = format!("<urn:s> <{RDF_NS}type> <{SEQ}> .\n<urn:s> <{RDF_NS}_1> <urn:s> .");
    assert_eq!(
        render(&text, "urn:s"),
        Err(SerializeError::Cycle(Subject::Iri("urn:s".into())))
    );
}

#[test]
fn shared_nodes_render_in_every_branch() -> anyhow::Result<()> {
    let text = format!(
        "<urn:a> <{EM_NS}left> _:id1 .\n<urn:a> <{EM_NS}right> _:id1 .\n_:id1 <{EM_NS}name> \"shared\" ."
    );
    let out = render(&text, "urn:a")?;
    assert_eq!(out.matches("<em:name>shared</em:name>").count(), 2);
    Ok(())
}

#[test]
fn same_property_sorts_by_content() -> anyhow::Result<()> {
    let text = format!(
        "<urn:a> <{EM_NS}targetApplication> _:id1 .\n<urn:a> <{EM_NS}targetApplication> _:id2 .\n_:id1 <{EM_NS}id> \"b\" .\n_:id2 <{EM_NS}id> \"a\" ."
    );
    let out = render(&text, "urn:a")?;
    assert!(out.find("<em:id>a</em:id>").unwrap() < out.find("<em:id>b</em:id>").unwrap());
    Ok(())
}

#[test]
fn literal_members_render_as_resources() -> anyhow::Result<()> {
    let text = format!("<urn:s> <{RDF_NS}type> <{SEQ}> .\n<urn:s> <{RDF_NS}_1> \"urn:lit\" .");
    let out = render(&text, "urn:s")?;
    assert!(out.contains("<RDF:Description about=\"urn:lit\">"));
    Ok(())
}

#[test]
fn values_are_not_escaped() -> anyhow::Result<()> {
    let text = format!("<urn:a> <{EM_NS}name> \"Tom & Jerry <3\" .");
    assert!(render(&text, "urn:a")?.contains("<em:name>Tom & Jerry <3</em:name>"));
    Ok(())
}

#[test]
fn value_and_escape_are_identity() {
    assert_eq!(value("a & <b>"), "a & <b>");
    assert_eq!(escape(Cow::Borrowed("a & <b>")), "a & <b>");
    assert!(matches!(escape(value("x")), Cow::Borrowed("x")));
}

#[test]
fn nested_indent() -> anyhow::Result<()> {
    let store = crate::parse(&format!("<urn:a> <{EM_NS}name> \"x\" ."))?;
    let vocab = Vocabulary::default();
    let out = Serializer::new(&store, &vocab, NoRewrite)
        .serialize_indented(&Subject::Iri("urn:a".into()), INDENT)?;
    assert_eq!(
        out,
        "  <RDF:Description about=\"urn:a\">\n    <em:name>x</em:name>\n  </RDF:Description>\n"
    );
    Ok(())
}

#[test]
fn substitution_replaces_values() -> anyhow::Result<()> {
    let store = crate::parse(&update_manifest().join("\n"))?;
    let vocab = Vocabulary::default();
    let out = serialize(
        &store,
        &Subject::Iri("urn:mozilla:extension:foo@example.org".into()),
        &vocab,
        Substitute::local(&vocab, "id", "{00000000-0000-0000-0000-000000000000}"),
    )?;
    assert!(out.contains("<em:id>{00000000-0000-0000-0000-000000000000}</em:id>"));
    assert!(!out.contains(FIREFOX));
    Ok(())
}

#[test]
fn hook_sees_every_property_statement() -> anyhow::Result<()> {
    let text = format!(
        "<urn:a> <{EM_NS}name> \"x\" .\n<urn:a> <urn:other#name> \"y\" .\n<urn:a> <{EM_NS}child> _:id1 .\n_:id1 <{EM_NS}name> \"z\" ."
    );
    let store = crate::parse(&text)?;
    let calls = Cell::new(0);
    let hook = |_: &Subject, predicate: &str, _: &Term| {
        calls.set(calls.get() + 1);
        // a replacement for a foreign predicate is still filtered out
        (predicate == "urn:other#name").then(|| Term::Literal("leaked".into()))
    };
    let out = serialize(
        &store,
        &Subject::Iri("urn:a".into()),
        &Vocabulary::default(),
        hook,
    )?;
    assert_eq!(calls.get(), 4);
    assert!(!out.contains("leaked"));
    Ok(())
}

#[test]
fn hook_can_introduce_nested_resources() -> anyhow::Result<()> {
    let text = format!("<urn:a> <{EM_NS}link> \"placeholder\" .\n_:id5 <{EM_NS}name> \"inner\" .");
    let store = crate::parse(&text)?;
    let hook = |_: &Subject, _: &str, object: &Term| {
        matches!(object, Term::Literal(l) if l == "placeholder").then(|| Term::Blank("_:id5".into()))
    };
    let out = serialize(
        &store,
        &Subject::Iri("urn:a".into()),
        &Vocabulary::default(),
        hook,
    )?;
    assert_eq!(
        out,
        "<RDF:Description about=\"urn:a\">\n  <em:link>\n    <RDF:Description>\n      <em:name>inner</em:name>\n    </RDF:Description>\n  </em:link>\n</RDF:Description>\n"
    );
    Ok(())
}

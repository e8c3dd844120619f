use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use desktop_file::{from_str, from_str_with_options, to_string, Locale, ParseOptions};

const LAUNCHER: &str = "\
[Desktop Entry]
Type=Application
Name=Text Editor
Name[de]=Texteditor
Name[fr]=Éditeur de texte
Name[pt_BR]=Editor de texto
Comment=Edit text files
Exec=gnome-text-editor %U
Icon=org.gnome.TextEditor
Terminal=false
Categories=GNOME;GTK;Utility;TextEditor;
MimeType=text/plain;
";

/// Builds a document with `groups` groups of 20 keys with 3 locale variants each.
fn synthetic(groups: usize) -> String {
    let mut text = String::new();
    for g in 0..groups {
        text.push_str(&format!("# group {g}\n[Group {g}]\n"));
        for k in 0..20 {
            text.push_str(&format!("Key{k}=value {k}\n"));
            for locale in ["de", "fr_FR", "sr@latin"] {
                text.push_str(&format!("Key{k}[{locale}]=value {k} {locale}\n"));
            }
        }
    }
    text
}

fn benchmark_parse_launcher(c: &mut Criterion) {
    c.bench_function("parse_launcher", |b| b.iter(|| from_str(black_box(LAUNCHER))));
}

fn benchmark_parse_synthetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_synthetic");

    for size in [1, 10, 100].iter() {
        let text = synthetic(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_serialize_synthetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_synthetic");

    for size in [1, 10, 100].iter() {
        let doc = from_str(&synthetic(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| to_string(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_locale_lookup(c: &mut Criterion) {
    let options = ParseOptions::new().with_default_locale(Locale::parse("fr_CA"));
    let doc = from_str_with_options(LAUNCHER, options).unwrap();
    let group = doc.get_group("Desktop Entry");

    c.bench_function("locale_lookup", |b| {
        b.iter(|| black_box(group.get_entry(black_box("Name")).value().as_raw().len()))
    });
}

criterion_group!(
    benches,
    benchmark_parse_launcher,
    benchmark_parse_synthetic,
    benchmark_serialize_synthetic,
    benchmark_locale_lookup
);
criterion_main!(benches);

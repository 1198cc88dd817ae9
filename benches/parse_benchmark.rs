//! Benchmarks for graph extraction performance.
//!
//! Run with: cargo bench
//!
//! Slides are generated as chains of shapes joined by connectors.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graph_pptx::query::QuerySet;
use graph_pptx::xml::XmlDocument;
use std::io::Cursor;

/// Slide XML with `shape_count` shapes and `shape_count - 1` connectors.
fn create_slide_xml(shape_count: usize) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld>
    <p:spTree>"#,
    );

    for i in 0..shape_count {
        content.push_str(&format!(
            r#"
      <p:sp>
        <p:nvSpPr><p:cNvPr id="{}" name="Shape {}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>
        <p:spPr><a:prstGeom prst="roundRect"><a:avLst/></a:prstGeom></p:spPr>
        <p:txBody><a:bodyPr/><a:p><a:r><a:t>Step </a:t></a:r><a:r><a:t> {}</a:t></a:r></a:p></p:txBody>
      </p:sp>"#,
            i, i, i
        ));
    }

    for i in 1..shape_count {
        content.push_str(&format!(
            r#"
      <p:cxnSp>
        <p:nvCxnSpPr><p:cNvPr id="{}" name="Connector"/><p:cNvCxnSpPr><a:stCxn id="{}" idx="3"/><a:endCxn id="{}" idx="1"/></p:cNvCxnSpPr><p:nvPr/></p:nvCxnSpPr>
      </p:cxnSp>"#,
            shape_count + i,
            i - 1,
            i
        ));
    }

    content.push_str(
        r#"
    </p:spTree>
  </p:cSld>
</p:sld>"#,
    );
    content
}

/// Wrap a slide in a minimal PPTX package.
fn create_test_pptx(shape_count: usize) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
</Types>"#,
    )
    .unwrap();

    zip.start_file("ppt/slides/slide1.xml", options).unwrap();
    zip.write_all(create_slide_xml(shape_count).as_bytes())
        .unwrap();

    zip.finish().unwrap();
    buffer
}

/// Benchmark the full pipeline at various sizes.
fn bench_pptx_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("pptx_extraction");

    for shape_count in [10, 100, 500, 1000].iter() {
        let data = create_test_pptx(*shape_count);
        let size = data.len() as u64;

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(BenchmarkId::new("shapes", shape_count), &data, |b, data| {
            b.iter(|| {
                let _ = graph_pptx::parse_bytes(black_box(data));
            });
        });
    }

    group.finish();
}

/// Benchmark document parsing alone.
fn bench_xml_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("xml_parsing");

    for shape_count in [10, 100, 500].iter() {
        let xml = create_slide_xml(*shape_count);

        group.bench_with_input(BenchmarkId::new("shapes", shape_count), &xml, |b, xml| {
            b.iter(|| {
                let _ = XmlDocument::parse(black_box(xml));
            });
        });
    }

    group.finish();
}

/// Benchmark query evaluation over an already parsed slide.
fn bench_query_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_evaluation");
    let queries = QuerySet::compile().unwrap();

    for shape_count in [10, 100, 500, 1000].iter() {
        let doc = XmlDocument::parse(&create_slide_xml(*shape_count)).unwrap();

        group.bench_with_input(BenchmarkId::new("shapes", shape_count), &doc, |b, doc| {
            b.iter(|| {
                let labels: usize = queries
                    .node
                    .all_matches(black_box(doc))
                    .unwrap()
                    .map(|sp| queries.node_label.strings(sp).unwrap().count())
                    .sum();
                black_box(labels);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pptx_extraction,
    bench_xml_parsing,
    bench_query_evaluation,
);
criterion_main!(benches);

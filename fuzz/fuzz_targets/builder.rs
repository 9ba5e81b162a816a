#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlb::{end_xml, new, Builder, Opt};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut parts = s.splitn(3, '\0');
        let label = parts.next().unwrap_or_default();
        let contents = parts.next().unwrap_or_default();
        let value = parts.next().unwrap_or_default();
        let options = [Opt::new(label, value)];

        let inner = new().tag(label, contents).comment(contents);
        let document = new()
            .cdata_tag(label, contents)
            .option_content_tag(label, contents, &options)
            .option_tag(label, &options)
            .block_tag(label, inner.clone())
            .option_block_tag(label, inner.clone(), &options)
            .block_comment(inner);
        let _ = end_xml(document);
    }
});

//! Rendering of a normalized snapshot into a compilable source unit.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::escape::string_expr;
use crate::snapshot::PropertySnapshot;
use crate::timestamp::{TimestampPair, LOCAL_FORMAT};
use crate::Result;

/// The emitted source unit: a namespace-scoped module exposing the
/// timestamp constants and the key/value store.
///
/// The text is deterministic for identical snapshot, timestamps, and
/// names, except for the `time()` body, which is an explicit second clock
/// reading taken while emitting.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    namespace: String,
    name: String,
    text: String,
}

impl GeneratedUnit {
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Writes the full text to `sink` and flushes it.
    ///
    /// Any I/O failure is fatal to the run and surfaces as
    /// [`Error::ArtifactWrite`](crate::Error::ArtifactWrite); a partially
    /// written artifact must never be treated as complete.
    pub fn write_to<W: Write>(&self, mut sink: W) -> Result<()> {
        sink.write_all(self.text.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Creates `path`, writes the full text, flushes, and closes it.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(file)
    }
}

/// Renders one [`PropertySnapshot`] plus one [`TimestampPair`] into a
/// [`GeneratedUnit`]. Stateless between runs; each call owns its output
/// buffer exclusively.
pub struct SourceEmitter<'a> {
    snapshot: &'a PropertySnapshot,
    timestamps: &'a TimestampPair,
    out: String,
}

impl<'a> SourceEmitter<'a> {
    /// Emits the complete unit text.
    ///
    /// `namespace` is one or more dot-separated module segments and
    /// `unit_name` a single module name; both must be valid Rust
    /// identifiers. String content in the snapshot is unrestricted.
    /// Emission itself cannot fail.
    pub fn emit(
        namespace: &str,
        unit_name: &str,
        snapshot: &'a PropertySnapshot,
        timestamps: &'a TimestampPair,
    ) -> GeneratedUnit {
        let mut emitter = Self {
            snapshot,
            timestamps,
            out: String::new(),
        };
        emitter.namespace_open(namespace);
        emitter.imports();
        emitter.unit_doc();
        emitter.unit_open(unit_name);
        emitter.timestamp_constants();
        emitter.timestamp_accessors();
        emitter.time_fn();
        emitter.properties_map();
        emitter.get_fn();
        emitter.key_set_fn();
        emitter.create_map_fn();
        emitter.unit_close();
        emitter.namespace_close(namespace);
        GeneratedUnit {
            namespace: namespace.to_string(),
            name: unit_name.to_string(),
            text: emitter.out,
        }
    }

    fn append(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn namespace_open(&mut self, namespace: &str) {
        for segment in namespace.split('.') {
            self.append(&format!("pub mod {segment} {{\n"));
        }
        self.append("\n");
    }

    fn namespace_close(&mut self, namespace: &str) {
        for _ in namespace.split('.') {
            self.append("}\n");
        }
    }

    // Always the same four lines, whatever the snapshot holds.
    fn imports(&mut self) {
        self.append("use std::collections::BTreeMap;\n");
        self.append("use std::collections::BTreeSet;\n");
        self.append("use chrono::{DateTime, FixedOffset, NaiveDateTime};\n");
        self.append("use once_cell::sync::Lazy;\n");
        self.append("\n");
    }

    fn unit_doc(&mut self) {
        self.append("/// Build-time property snapshot.\n");
        self.append("///\n");
        self.append("/// Generated by `buildstamp` on behalf of the build script that opted\n");
        self.append("/// in; regenerated on every build. Do not edit by hand.\n");
    }

    fn unit_open(&mut self, unit_name: &str) {
        self.append(&format!("pub mod {unit_name} {{\n"));
        self.append("    use super::*;\n\n");
    }

    fn unit_close(&mut self) {
        self.append("}\n");
    }

    // The constants round-trip through text rather than any native
    // date-time literal, so the unit never depends on one existing.
    fn timestamp_constants(&mut self) {
        let local_text = self.timestamps.local_text();
        let zoned_text = self.timestamps.zoned_text();
        self.append("    static LOCAL_DATE_TIME: Lazy<NaiveDateTime> = Lazy::new(|| {\n");
        self.append(&format!(
            "        NaiveDateTime::parse_from_str(\"{local_text}\", \"{LOCAL_FORMAT}\")\n"
        ));
        self.append("            .expect(\"generated local timestamp is well-formed\")\n");
        self.append("    });\n\n");
        self.append("    static ZONED_DATE_TIME: Lazy<DateTime<FixedOffset>> = Lazy::new(|| {\n");
        self.append(&format!(
            "        DateTime::parse_from_rfc3339(\"{zoned_text}\")\n"
        ));
        self.append("            .expect(\"generated zoned timestamp is well-formed\")\n");
        self.append("    });\n\n");
    }

    fn timestamp_accessors(&mut self) {
        self.append("    /// Local wall-clock time captured when generation started.\n");
        self.append("    pub fn local_date_time() -> NaiveDateTime {\n");
        self.append("        *LOCAL_DATE_TIME\n");
        self.append("    }\n\n");
        self.append("    /// Zone-aware time captured when generation started.\n");
        self.append("    pub fn zoned_date_time() -> DateTime<FixedOffset> {\n");
        self.append("        *ZONED_DATE_TIME\n");
        self.append("    }\n\n");
    }

    fn time_fn(&mut self) {
        // A second clock reading taken here, not derived from the pair.
        let display = Local::now().format("%Y-%m-%d %H:%M:%S%.f").to_string();
        self.append("    /// Display string captured while this body was emitted; not\n");
        self.append("    /// necessarily equal to the timestamp constants above.\n");
        self.append("    pub fn time() -> &'static str {\n");
        self.append(&format!("        \"{display}\"\n"));
        self.append("    }\n\n");
    }

    fn properties_map(&mut self) {
        self.append("    static PROPERTIES: Lazy<BTreeMap<String, String>> = Lazy::new(create_map);\n\n");
    }

    fn get_fn(&mut self) {
        self.append("    /// Looks up a captured property by key.\n");
        self.append("    pub fn get(key: &str) -> Option<&'static str> {\n");
        self.append("        PROPERTIES.get(key).map(String::as_str)\n");
        self.append("    }\n\n");
    }

    fn key_set_fn(&mut self) {
        let snapshot = self.snapshot;
        self.append("    /// Every captured property key:\n");
        self.append("    ///\n");
        for key in snapshot.keys() {
            self.append(&format!("    /// - `{}`\n", doc_text(key)));
        }
        self.append("    pub fn key_set() -> BTreeSet<&'static str> {\n");
        self.append("        PROPERTIES.keys().map(String::as_str).collect()\n");
        self.append("    }\n\n");
    }

    fn create_map_fn(&mut self) {
        let snapshot = self.snapshot;
        self.append("    fn create_map() -> BTreeMap<String, String> {\n");
        if snapshot.is_empty() {
            self.append("        let result = BTreeMap::new();\n");
        } else {
            self.append("        let mut result = BTreeMap::new();\n");
        }
        for (key, value) in snapshot.entries() {
            self.append(&format!(
                "        result.insert({}, {});\n",
                string_expr(key),
                string_expr(value)
            ));
        }
        self.append("        result\n");
        self.append("    }\n");
    }
}

// Keys are quoted inline in a doc comment, so line separators must not
// reach the output verbatim.
fn doc_text(key: &str) -> String {
    key.replace('\n', "\\n").replace('\r', "\\r")
}

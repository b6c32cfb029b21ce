use crate::application::read_models::{
    CatalogReadModel, CatalogView, NearestView, QueryResult, SourceView,
};
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;
use crate::sky::SkyScene;

/// TextFormatter adapter for human-readable output
///
/// Single sources use the TeVCat summary layout; listings use one aligned
/// line per source.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn format_sources(out: &mut String, version: &str, sources: &[SourceView]) {
        out.push_str(&format!("TeVCat {} - {} sources\n", version, sources.len()));
        if sources.is_empty() {
            return;
        }
        out.push('\n');
        out.push_str(&format!(
            "{:>5}  {:<28} {:<16} {:<22} {:>8} {:>8}\n",
            "ID", "Name", "TeVCat Name", "Type", "l (deg)", "b (deg)"
        ));
        for source in sources {
            out.push_str(&format!(
                "{:>5}  {:<28} {:<16} {:<22} {:>8.2} {:>8.2}\n",
                source.id,
                source.canonical_name,
                source.tevcat_name,
                source.source_type,
                source.galactic_l_deg,
                source.galactic_b_deg
            ));
        }
    }

    fn format_catalogs(out: &mut String, catalogs: &[CatalogView]) {
        for (i, catalog) in catalogs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("ID:\t{}\n", catalog.id));
            out.push_str(&format!("Name:\t{}\n", catalog.name));
            out.push_str(&format!("Description:\t{}\n", catalog.description));
            out.push_str(&format!("Sources:\t{}\n", catalog.source_count));
        }
    }

    fn format_nearest(out: &mut String, nearest: Option<&NearestView>) {
        match nearest {
            Some(found) => {
                out.push_str(&format!(
                    "Nearest source to l={:.2}, b={:.2}: {} ({:.2} deg away)\n\n",
                    found.l_deg, found.b_deg, found.source.canonical_name, found.separation_deg
                ));
                out.push_str(&found.source.summary);
                out.push('\n');
            }
            None => out.push_str("No source found within the search radius\n"),
        }
    }

    fn format_sky_map(out: &mut String, scene: &SkyScene) {
        out.push_str(&scene.backdrop.caption.text);
        out.push('\n');
        out.push_str(&format!(
            "Background:\t{}\n",
            scene.backdrop.image.unwrap_or("hidden")
        ));
        out.push_str(&format!("Markers:\t{}\n", scene.sources.marker_count()));
        for series in &scene.sources.series {
            out.push_str(&format!(
                "  {:<24} {}\n",
                series.source_type_name,
                series.markers.len()
            ));
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for TextFormatter {
    fn format(&self, model: &CatalogReadModel) -> Result<String> {
        let mut out = String::new();
        match &model.result {
            QueryResult::Sources(sources) => {
                Self::format_sources(&mut out, &model.metadata.tevcat_version, sources)
            }
            QueryResult::Source(source) => {
                out.push_str(&source.summary);
                out.push('\n');
            }
            QueryResult::Catalogs(catalogs) => Self::format_catalogs(&mut out, catalogs),
            QueryResult::Nearest(nearest) => Self::format_nearest(&mut out, nearest.as_ref()),
            QueryResult::SkyMap(scene) => Self::format_sky_map(&mut out, scene),
        }
        Ok(out)
    }
}

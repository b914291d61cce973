// ============================================================================
// I18N - UI strings for the route finder
// ============================================================================

use std::collections::HashMap;

/// Translation table for a language (anything unknown falls back to EN)
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "FR" => {
            translations.insert("origin_destination_required", "L'origine et la destination sont obligatoires.");
            translations.insert("finding_routes", "Recherche des routes...");
            translations.insert("error_prefix", "Erreur");
            translations.insert("unknown_error", "Une erreur inconnue est survenue.");
            translations.insert("no_routes_found", "Aucune route ne correspond à vos critères.");
            translations.insert("bucket_preferred", "Routes préférentielles");
            translations.insert("bucket_no_coord", "CDR (sans coordination)");
            translations.insert("bucket_coord_req", "CDR (coordination requise)");
            translations.insert("bucket_other", "Autres");
            translations.insert("column_route", "Route");
            translations.insert("column_type", "Type");
            translations.insert("column_notes", "Notes");
        }
        "ES" => {
            translations.insert("origin_destination_required", "El origen y el destino son obligatorios.");
            translations.insert("finding_routes", "Buscando rutas...");
            translations.insert("error_prefix", "Error");
            translations.insert("unknown_error", "Ocurrió un error desconocido.");
            translations.insert("no_routes_found", "No se encontraron rutas que coincidan con sus criterios.");
            translations.insert("bucket_preferred", "Rutas preferentes");
            translations.insert("bucket_no_coord", "CDR (sin coordinación)");
            translations.insert("bucket_coord_req", "CDR (coordinación requerida)");
            translations.insert("bucket_other", "Otras");
            translations.insert("column_route", "Ruta");
            translations.insert("column_type", "Tipo");
            translations.insert("column_notes", "Notas");
        }
        "EN" | _ => {
            translations.insert("origin_destination_required", "Origin and Destination are required.");
            translations.insert("finding_routes", "Finding routes...");
            translations.insert("error_prefix", "Error");
            translations.insert("unknown_error", "An unknown error occurred.");
            translations.insert("no_routes_found", "No routes found matching your criteria.");
            translations.insert("bucket_preferred", "Preferred Routes");
            translations.insert("bucket_no_coord", "CDRs (No Coordination)");
            translations.insert("bucket_coord_req", "CDRs (Coordination Required)");
            translations.insert("bucket_other", "Other");
            translations.insert("column_route", "Route");
            translations.insert("column_type", "Type");
            translations.insert("column_notes", "Notes");
        }
    }

    translations
}

/// Translate `key` into `lang`, returning the key itself when missing
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}

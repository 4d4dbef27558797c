// ============================================================================
// Role lookup tables — data, not code
// ============================================================================

// Generic widget types, keyed by the short (last path segment) type name.
// Confidence reflects how diagnostic the raw type name is: 0.70 for
// ambiguous containers up to 0.99 for the unambiguous form root.
const WIDGET_TYPE_ROLES: &[(&str, &str, f64)] = &[
    ("Button", "Action", 0.95),
    ("TextBox", "InputField", 0.95),
    ("Label", "Label", 0.90),
    ("ComboBox", "SelectField", 0.90),
    ("CheckBox", "ToggleField", 0.90),
    ("RadioButton", "ToggleField", 0.85),
    ("ListBox", "ListControl", 0.85),
    ("DataGridView", "DataGrid", 0.95),
    ("TreeView", "TreeControl", 0.90),
    ("TabControl", "TabContainer", 0.90),
    ("Panel", "Container", 0.70),
    ("GroupBox", "GroupContainer", 0.80),
    ("Form", "FormRoot", 0.99),
    ("MenuStrip", "Menu", 0.90),
    ("ToolStrip", "Toolbar", 0.85),
    ("StatusStrip", "StatusBar", 0.85),
    ("PictureBox", "Image", 0.85),
    ("ProgressBar", "ProgressIndicator", 0.90),
    ("NumericUpDown", "NumericInput", 0.85),
    ("DateTimePicker", "DateInput", 0.90),
];

// Vendor-specific widget kinds, checked before the generic table.
const VENDOR_KIND_ROLES: &[(&str, &str, f64)] = &[
    ("GridControl", "DataGrid", 0.95),
    ("PivotGridControl", "PivotTable", 0.95),
    ("XtraTabControl", "TabContainer", 0.95),
    ("LayoutControl", "LayoutContainer", 0.90),
    ("RibbonControl", "Ribbon", 0.95),
    ("BarManager", "Toolbar", 0.90),
];

/// Ordered, case-insensitive mappings from type/kind strings to
/// (role, confidence) pairs. Built once at startup; config entries may
/// extend or override the builtin data.
#[derive(Debug, Clone)]
pub struct RoleTables {
    vendor_kinds: Vec<(String, String, f64)>,
    widget_types: Vec<(String, String, f64)>,
}

impl RoleTables {
    pub fn builtin() -> Self {
        Self {
            vendor_kinds: owned(VENDOR_KIND_ROLES),
            widget_types: owned(WIDGET_TYPE_ROLES),
        }
    }

    /// Look up a vendor-specific kind string.
    pub fn vendor_role(&self, kind: &str) -> Option<(&str, f64)> {
        lookup(&self.vendor_kinds, kind)
    }

    /// Look up a short widget type name.
    pub fn widget_role(&self, short_type: &str) -> Option<(&str, f64)> {
        lookup(&self.widget_types, short_type)
    }

    /// Add or replace a vendor-kind entry (same-key entries are replaced so
    /// the precedence order stays stable).
    pub fn extend_vendor(&mut self, kind: &str, role: &str, confidence: f64) {
        upsert(&mut self.vendor_kinds, kind, role, confidence);
    }

    /// Add or replace a widget-type entry.
    pub fn extend_widget(&mut self, short_type: &str, role: &str, confidence: f64) {
        upsert(&mut self.widget_types, short_type, role, confidence);
    }
}

impl Default for RoleTables {
    fn default() -> Self {
        Self::builtin()
    }
}

fn owned(table: &[(&str, &str, f64)]) -> Vec<(String, String, f64)> {
    table
        .iter()
        .map(|(key, role, confidence)| (key.to_string(), role.to_string(), *confidence))
        .collect()
}

fn lookup<'a>(table: &'a [(String, String, f64)], key: &str) -> Option<(&'a str, f64)> {
    table
        .iter()
        .find(|(entry_key, _, _)| entry_key.eq_ignore_ascii_case(key))
        .map(|(_, role, confidence)| (role.as_str(), *confidence))
}

fn upsert(table: &mut Vec<(String, String, f64)>, key: &str, role: &str, confidence: f64) {
    match table
        .iter_mut()
        .find(|(entry_key, _, _)| entry_key.eq_ignore_ascii_case(key))
    {
        Some(entry) => {
            entry.1 = role.to_string();
            entry.2 = confidence;
        }
        None => table.push((key.to_string(), role.to_string(), confidence)),
    }
}

use std::{fmt, str::FromStr};

use crate::{animation::tween::TARGET_ID, foundation::error::AnimatorError};

const GSAP_CDN: &str = "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.11.4/gsap.min.js";

/// Binding that replaces the target selector in component exports.
pub const COMPONENT_TARGET_BINDING: &str = "targetRef.current";

/// Export wrappers for a script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Plain script with a dependency header.
    #[default]
    Raw,
    /// Standalone HTML page.
    Page,
    /// React component.
    Component,
}

impl ExportMode {
    pub const ALL: [Self; 3] = [Self::Raw, Self::Page, Self::Component];

    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Raw => "js",
            Self::Page => "html",
            Self::Component => "jsx",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Raw => "GSAP JavaScript",
            Self::Page => "HTML page",
            Self::Component => "React component",
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Raw => "raw",
            Self::Page => "page",
            Self::Component => "component",
        })
    }
}

impl FromStr for ExportMode {
    type Err = AnimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" | "js" => Ok(Self::Raw),
            "page" | "html" => Ok(Self::Page),
            "component" | "react" | "jsx" => Ok(Self::Component),
            other => Err(AnimatorError::validation(format!(
                "unknown export mode '{other}'"
            ))),
        }
    }
}

/// Wrap `script` for export. The script body is inserted verbatim, except that component mode
/// rewrites every quoted target selector to [`COMPONENT_TARGET_BINDING`].
pub fn format(script: &str, mode: ExportMode) -> String {
    match mode {
        ExportMode::Raw => format_raw(script),
        ExportMode::Page => format_page(script),
        ExportMode::Component => format_component(script),
    }
}

fn format_raw(script: &str) -> String {
    format!(
        "// GSAP Animation Code
// Requires the GSAP library: https://greensock.com/gsap/
// CDN: <script src=\"{GSAP_CDN}\"></script>

{script}"
    )
}

fn format_page(script: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"UTF-8\">
  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
  <title>GSAP Animation</title>
  <script src=\"{GSAP_CDN}\"></script>
  <style>
    body {{
      display: flex;
      justify-content: center;
      align-items: center;
      height: 100vh;
      margin: 0;
      background-color: #f5f5f5;
    }}
    #{TARGET_ID} {{
      width: 100px;
      height: 100px;
      background-color: #3f51b5;
      border-radius: 8px;
      display: flex;
      justify-content: center;
      align-items: center;
      color: white;
      font-weight: bold;
    }}
  </style>
</head>
<body>
  <div id=\"{TARGET_ID}\">Target</div>

  <script>
    // animation code
    {script}
  </script>
</body>
</html>"
    )
}

fn format_component(script: &str) -> String {
    let selector = format!("\"#{TARGET_ID}\"");
    let body = script.replace(&selector, COMPONENT_TARGET_BINDING);
    format!(
        "import {{ useEffect, useRef }} from 'react';
// Requires GSAP: npm install gsap
import gsap from 'gsap';

const AnimationComponent = () => {{
  const targetRef = useRef(null);

  useEffect(() => {{
    if (targetRef.current) {{
      // stop any running tweens first
      gsap.killTweensOf(targetRef.current);

      // animation code
      {body}
    }}

    return () => {{
      if (targetRef.current) {{
        gsap.killTweensOf(targetRef.current);
      }}
    }};
  }}, []);

  return (
    <div
      ref={{targetRef}}
      style={{{{
        width: 100,
        height: 100,
        backgroundColor: '#3f51b5',
        borderRadius: 8,
        display: 'flex',
        justifyContent: 'center',
        alignItems: 'center',
        color: 'white',
        fontWeight: 'bold'
      }}}}
    >
      Target
    </div>
  );
}};

export default AnimationComponent;"
    )
}

#[cfg(test)]
#[path = "../../tests/unit/export/format.rs"]
mod tests;

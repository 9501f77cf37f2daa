//! The fixed plan prompt and the system prompt that carries the schema.
//!
//! The product is a single report type, so the prompt takes no caller
//! input. The Converse API has no response-schema parameter; the schema is
//! embedded in the system prompt instead.

use lufa_core::schema::SchemaDescriptor;

pub const PLAN_PROMPT: &str = "\
Genera un plan de negocios detallado y profesional para el cultivo, la \
transformación y la exportación de lufa (Luffa aegyptiaca) desde América \
Latina hacia el mercado de Canadá. El mercado canadiense valora la \
sostenibilidad, los productos eco-friendly y los accesorios de spa de lujo.

Enfócate en productos de alta rentabilidad:
1. Esponjas de spa tratadas con aceites esenciales.
2. Discos exfoliantes faciales de alta calidad.
3. Filtros industriales biodegradables.
4. Empaques compostables basados en fibra de lufa.

El documento debe estar en español e incluir:
- Título del proyecto.
- Resumen ejecutivo.
- Análisis del mercado canadiense (demanda de productos naturales, regulaciones de importación).
- Proceso de producción (cultivo orgánico, cosecha, secado).
- Especificaciones de producto, con énfasis en ergonomía y seguridad para el adulto mayor.
- Estrategia de exportación y logística.
- Flujograma operativo numerado desde el paso 1.
- Análisis de costos por concepto, con unidad y costo estimado.
- Cronograma de ejecución por periodos, fases e hitos.
- Proyecciones financieras (ROI, márgenes de ganancia).
- Conclusión.";

const RESPONSE_RULES: &str = "\
Eres un consultor de comercio exterior. Responde únicamente con un objeto \
JSON válido que cumpla el siguiente esquema. No agregues texto antes ni \
después del objeto, ni bloques de código Markdown.";

/// Build the system prompt instructing the model to answer with JSON
/// matching `schema`.
pub fn build_system_prompt(schema: &SchemaDescriptor) -> String {
    format!(
        "{RESPONSE_RULES}\n\n<response_schema>\n{:#}\n</response_schema>",
        schema.as_json()
    )
}

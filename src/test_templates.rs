//! Real base64 finger minutiae records shared by the test modules.
//!
//! Both declare far more minutiae than their record streams hold, so parsing
//! them exercises the truncation path: template 1 yields 46 minutiae,
//! template 2 yields 36.

pub const TEMPLATE_1: &str = "Rk1SACAyMAAAAAEyAAABAAGQAMUAxQEAAABTLkCTABj8UIByACmAUIBkACsAUEDlADf8PEByAEDwXUBBAEf0UICMAFrkXYCoAFr0UEBaAFzoXUDEAFx4UIDbAGGMSoA1AGHoUECAAGPcXUDuAGiUSoDEAG+EXUB0AHbIXYDsAHaYUECTAHvIXYBiAH3MUICHAITEXUC/AISYXYBrAJlQUIBDAJ7UXYCaAKA4XYA6AKXUXUCOAKw8XYA1ALrUXUClALooXUB0AMaEXYAuAMjUXYDwAMicQ4BiANQEXUDUANYgXUAPANvUXYApAOvUUIBYAPD0XYApAPJQUEApAQzgXUDwAQywQ4DlARGkUEBMASFkXYDZAU6YQ0CxAVcYXUBRAXH0XUBwAXF4XUApAXjkUAAA";

pub const TEMPLATE_2: &str = "Rk1SACAyMAAAAAD2AAABAAGQAMUAxQEAAABRJECHAC3wV0BYADL0V4ChAEDkV0DeAEV4SkByAEnoV0DCAEn4V0BKAE7kV0CVAE7cV4DZAFqASoCMAFzMXUDzAF+kSoCtAGPMXYChAGrEXUDXAG2YXYBdAIbUXYCvAIs8XYBRAJDUXUCjAJc4XYCHAJssV4BKAKLQXUC9AKIsXYBDAK7QXYANALhYQ0B5ALgAUEAlAMHUV4BwANbwXYBBAPDgXYASAQBcV4BkAQdoXYDnAQqcUIDlAR8UQ0DuAS2wPEDJAUAUV0CFAVd4XUBpAVn0XUBDAWPoXQAA";

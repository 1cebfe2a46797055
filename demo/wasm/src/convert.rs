//! `AvatarData` to plain JS object conversion.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;

use ugly_avatar::{AvatarData, PointD};

fn set(obj: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(obj, &JsValue::from_str(key), value).map(|_| ())
}

fn point(p: &PointD) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    set(&obj, "x", &JsValue::from_f64(p.x))?;
    set(&obj, "y", &JsValue::from_f64(p.y))?;
    Ok(obj.into())
}

fn points(pts: &[PointD]) -> Result<JsValue, JsValue> {
    let arr = Array::new();
    for p in pts {
        arr.push(&point(p)?);
    }
    Ok(arr.into())
}

pub fn avatar_to_js(avatar: &AvatarData) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    set(&obj, "faceShape", &points(&avatar.face_shape)?)?;
    set(&obj, "leftEye", &points(&avatar.left_eye)?)?;
    set(&obj, "rightEye", &points(&avatar.right_eye)?)?;
    set(&obj, "leftPupil", &point(&avatar.left_pupil)?)?;
    set(&obj, "rightPupil", &point(&avatar.right_pupil)?)?;

    let hair = Array::new();
    for strand in &avatar.hair_lines {
        hair.push(&points(strand)?);
    }
    set(&obj, "hairLines", &hair)?;
    set(&obj, "hairType", &JsValue::from(u8::from(avatar.hair_type)))?;
    set(&obj, "hairColor", &JsValue::from_str(&avatar.hair_color.to_string()))?;
    set(&obj, "hasRainbowHair", &JsValue::from_bool(avatar.has_rainbow_hair))?;

    set(&obj, "mouthShape", &points(&avatar.mouth_shape)?)?;
    set(&obj, "mouthType", &JsValue::from(u8::from(avatar.mouth_type)))?;
    set(&obj, "noseType", &JsValue::from(u8::from(avatar.nose_type)))?;
    set(&obj, "nosePoints", &points(&avatar.nose_points)?)?;
    set(
        &obj,
        "backgroundColor",
        &JsValue::from_str(&avatar.background_color.to_string()),
    )?;
    Ok(obj.into())
}
